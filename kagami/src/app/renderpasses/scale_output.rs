use glium::Surface;

pub struct ScaleOutput {}

impl ScaleOutput {
    /// Blits `texture` centered on `frame`, retaining its aspect ratio.
    pub fn draw(texture: &glium::Texture2d, frame: &mut glium::Frame) {
        let source_rect = glium::Rect {
            left: 0,
            bottom: 0,
            width: texture.width(),
            height: texture.height(),
        };

        let (width, height) = frame.get_dimensions();
        let target_rect = letterbox(
            (width, height),
            (texture.width(), texture.height()),
        );

        texture.as_surface().blit_color(
            &source_rect,
            &*frame,
            &target_rect,
            glium::uniforms::MagnifySamplerFilter::Linear,
        );
    }
}

// Film rows are stored bottom-up like gl so there is no flip
fn letterbox(frame: (u32, u32), texture: (u32, u32)) -> glium::BlitTarget {
    let (width, height) = frame;
    let (texture_width, texture_height) = texture;
    let frame_aspect = (width as f32) / (height as f32);
    let texture_aspect = (texture_width as f32) / (texture_height as f32);
    let to_i32 = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);

    if frame_aspect < texture_aspect {
        let scaled_height = (width * texture_height) / texture_width;
        glium::BlitTarget {
            left: 0,
            bottom: height.saturating_sub(scaled_height) / 2,
            width: to_i32(width),
            height: to_i32(scaled_height),
        }
    } else {
        let scaled_width = (height * texture_width) / texture_height;
        glium::BlitTarget {
            left: width.saturating_sub(scaled_width) / 2,
            bottom: 0,
            width: to_i32(scaled_width),
            height: to_i32(height),
        }
    }
}
