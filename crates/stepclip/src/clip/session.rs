//! Clip session: the state carried between interactive steps.

use nalgebra::Vector2;

use crate::geom2::{ClipCfg, Polygon};

use super::step::clip_against_edge;
use super::types::{CursorPolicy, SessionState, StepReport, Target};

/// Subject, clip, and the edge cursor for the next step.
///
/// Invariants:
/// - `edge_index < clip.len()` whenever the session is `Ready`.
/// - `step` mutates only the subject (normalization may reorder both).
#[derive(Clone, Debug, Default)]
pub struct ClipSession {
    subject: Polygon,
    clip: Polygon,
    edge_index: usize,
    cfg: ClipCfg,
    policy: CursorPolicy,
    target: Target,
    last: Option<StepReport>,
}

impl ClipSession {
    pub fn new(cfg: ClipCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn from_polygons(subject: Polygon, clip: Polygon, cfg: ClipCfg) -> Self {
        Self {
            subject,
            clip,
            cfg,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_policy(mut self, policy: CursorPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn subject(&self) -> &Polygon {
        &self.subject
    }
    #[inline]
    pub fn clip(&self) -> &Polygon {
        &self.clip
    }
    #[inline]
    pub fn edge_index(&self) -> usize {
        self.edge_index
    }
    #[inline]
    pub fn cfg(&self) -> &ClipCfg {
        &self.cfg
    }
    /// Replace tolerances or region (e.g. after a viewport resize).
    #[inline]
    pub fn set_cfg(&mut self, cfg: ClipCfg) {
        self.cfg = cfg;
    }
    #[inline]
    pub fn policy(&self) -> CursorPolicy {
        self.policy
    }
    #[inline]
    pub fn target(&self) -> Target {
        self.target
    }
    /// Report of the most recent successful `step`.
    #[inline]
    pub fn last_report(&self) -> Option<&StepReport> {
        self.last.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.subject.is_degenerate() || self.clip.is_degenerate() {
            SessionState::Idle
        } else {
            SessionState::Ready
        }
    }

    /// Flip which polygon `push` appends to; returns the new target.
    pub fn switch_target(&mut self) -> Target {
        self.target = self.target.toggled();
        self.target
    }

    /// Append to the current target polygon.
    pub fn push(&mut self, p: Vector2<f64>) {
        self.push_to(self.target, p);
    }

    pub fn push_to(&mut self, target: Target, p: Vector2<f64>) {
        match target {
            Target::Subject => self.subject.push(p),
            Target::Clip => self.clip.push(p),
        }
        if self.policy == CursorPolicy::ResetOnEdit {
            self.edge_index = 0;
        }
    }

    /// Drop both polygons, the cursor, and the last report.
    pub fn clear(&mut self) {
        self.subject = Polygon::new();
        self.clip = Polygon::new();
        self.edge_index = 0;
        self.last = None;
    }

    /// Normalize both polygons; returns `(subject_reversed, clip_reversed)`.
    pub fn normalize(&mut self) -> (bool, bool) {
        (self.subject.normalize(), self.clip.normalize())
    }

    /// Clip the subject against the half-plane of clip edge `edge_index`, then
    /// advance the cursor.
    ///
    /// Returns `None` (and changes nothing) while `Idle`.
    pub fn step(&mut self) -> Option<&StepReport> {
        if self.state() == SessionState::Idle {
            tracing::debug!(
                subject = self.subject.len(),
                clip = self.clip.len(),
                "step skipped: idle"
            );
            return None;
        }
        self.normalize();
        let n = self.clip.len();
        let k = self.edge_index % n;
        let (a, b) = self.clip.edge(k)?;
        let before = self.subject.len();
        let (next, splices) = clip_against_edge(self.subject.points(), a, b, &self.cfg);
        self.subject = Polygon::from_points(next);
        self.edge_index = (k + 1) % n;
        let report = StepReport {
            edge_index: k,
            clip_edge: (a, b),
            splices,
            subject_len_before: before,
            subject_len_after: self.subject.len(),
        };
        tracing::debug!(
            edge = k,
            outside = report.splices.len(),
            deleted = report.deleted(),
            before,
            after = report.subject_len_after,
            "step"
        );
        self.last = Some(report);
        self.last.as_ref()
    }

    /// One `step` per clip edge (a full Sutherland–Hodgman pass for convex clips).
    ///
    /// Stops early if the session becomes `Idle`; returns the number of steps taken.
    pub fn run_round(&mut self) -> usize {
        let n = self.clip.len();
        let mut taken = 0;
        for _ in 0..n {
            if self.step().is_none() {
                break;
            }
            taken += 1;
        }
        taken
    }
}
