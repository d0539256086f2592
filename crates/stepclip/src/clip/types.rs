//! Data types for the clip session and its per-step report.
//!
//! Kept small and explicit so `step` and `session` stay easy to read.

use nalgebra::Vector2;

/// Which polygon receives appended points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Target {
    #[default]
    Subject,
    Clip,
}

impl Target {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Target::Subject => Target::Clip,
            Target::Clip => Target::Subject,
        }
    }
}

/// What happens to the edge cursor when a point is appended to either polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorPolicy {
    /// Keep stepping from the current edge (interactive default).
    #[default]
    Keep,
    /// Restart at clip edge 0 after any edit.
    ResetOnEdit,
}

/// `Idle` while either polygon has fewer than 3 vertices; `step` is a no-op then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Ready,
}

/// One outside vertex and the 0..=2 points that replaced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Splice {
    /// Index of the vertex in the subject as it was before the step.
    pub index: usize,
    pub vertex: Vector2<f64>,
    /// Ordered `[edge ending at vertex, edge starting at vertex]`, filtered.
    pub replacements: Vec<Vector2<f64>>,
}

/// Everything a renderer needs to overlay the most recent step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    /// Clip edge index used by this step (the cursor before advancing).
    pub edge_index: usize,
    pub clip_edge: (Vector2<f64>, Vector2<f64>),
    pub splices: Vec<Splice>,
    pub subject_len_before: usize,
    pub subject_len_after: usize,
}

impl StepReport {
    /// Vertices classified outside the clip edge's half-plane.
    pub fn outside(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.splices.iter().map(|s| s.vertex)
    }

    /// Intersection points inserted by this step, in subject order.
    pub fn replacements(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.splices.iter().flat_map(|s| s.replacements.iter().copied())
    }

    /// Outside vertices whose candidates were all rejected.
    pub fn deleted(&self) -> usize {
        self.splices.iter().filter(|s| s.replacements.is_empty()).count()
    }
}
