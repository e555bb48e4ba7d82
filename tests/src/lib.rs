mod common;
mod matrix;
mod ray;
mod transforms;
mod vector;
