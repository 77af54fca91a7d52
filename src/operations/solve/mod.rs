mod solve_curve;

pub use solve_curve::{CurveSolution, SolveCurve, VertexSolution};
