/// A pixel coordinate, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
