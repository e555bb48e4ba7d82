#[cfg(test)]
mod tests {
    use kagami::math::{sign, step};

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0f32), 0.0);
        assert_eq!(sign(-0.0f32), 0.0);
        assert_eq!(sign(2.5f32), 1.0);
        assert_eq!(sign(-0.1f32), -1.0);
        assert_eq!(sign(f32::INFINITY), 1.0);
        assert_eq!(sign(f32::MIN), -1.0);
    }

    #[test]
    fn step_includes_edge() {
        assert_eq!(step(1.0f32, 0.5), 0.0);
        assert_eq!(step(1.0f32, 1.0), 1.0);
        assert_eq!(step(1.0f32, 2.0), 1.0);
        assert_eq!(step(f32::NEG_INFINITY, f32::NEG_INFINITY), 1.0);
    }
}
