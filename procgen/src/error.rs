use grid_2d::Size;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// No pair of cells in a grid of this size is far enough apart to hold
    /// a start and a goal.
    GridTooSmall { size: Size },
    /// Every carving attempt got stuck before reaching the goal.
    RouteNotFound { attempts: u32 },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::GridTooSmall { size } => write!(
                f,
                "a {}x{} grid is too small to place a start and goal",
                size.width(),
                size.height()
            ),
            GenerateError::RouteNotFound { attempts } => {
                write!(f, "can not create a route after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for GenerateError {}
