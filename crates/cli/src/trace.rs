//! Step replay and its JSON trace.

use serde::Serialize;
use stepclip::{ClipSession, StepReport};

use crate::scenario::to_pairs;

/// One executed step: the edge used, overlay points, and the resulting subject.
#[derive(Clone, Debug, Serialize)]
pub struct StepRecord {
    pub edge_index: usize,
    pub clip_edge: [[f64; 2]; 2],
    pub outside: Vec<[f64; 2]>,
    pub replacements: Vec<[f64; 2]>,
    pub deleted: usize,
    pub subject: Vec<[f64; 2]>,
    pub subject_area: f64,
}

impl StepRecord {
    fn new(report: &StepReport, session: &ClipSession) -> Self {
        let (a, b) = report.clip_edge;
        Self {
            edge_index: report.edge_index,
            clip_edge: [[a.x, a.y], [b.x, b.y]],
            outside: report.outside().map(|p| [p.x, p.y]).collect(),
            replacements: report.replacements().map(|p| [p.x, p.y]).collect(),
            deleted: report.deleted(),
            subject: to_pairs(session.subject().points()),
            subject_area: session.subject().signed_area(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Trace {
    pub steps: Vec<StepRecord>,
    /// Cursor after the last executed step.
    pub edge_index: usize,
    /// True if the session went idle before all requested steps ran.
    pub stopped_idle: bool,
}

/// Run up to `steps` steps, recording each one.
pub fn replay(session: &mut ClipSession, steps: usize) -> Trace {
    let mut records = Vec::with_capacity(steps);
    let mut stopped_idle = false;
    for _ in 0..steps {
        let Some(report) = session.step().cloned() else {
            stopped_idle = true;
            break;
        };
        records.push(StepRecord::new(&report, session));
    }
    tracing::info!(
        requested = steps,
        executed = records.len(),
        stopped_idle,
        "replay"
    );
    Trace {
        steps: records,
        edge_index: session.edge_index(),
        stopped_idle,
    }
}
