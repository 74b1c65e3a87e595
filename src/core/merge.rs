use crate::models::write_off::{WriteOff, WriteOffKind};

/// One commit unit: all records of a task within one classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedWriteOff {
    /// Representative record carrying the summed hours.
    pub record: WriteOff,
    /// Number of records folded into this entry.
    pub sources: usize,
}

impl MergedWriteOff {
    pub fn kind(&self) -> Option<WriteOffKind> {
        self.record.kind().ok()
    }
}

/// Collapse records into at most one entry per task and classification.
///
/// User-confirmed entries come first, then pending ones. Inside a group the
/// representative is the most recently scheduled member (earlier insertion
/// wins a tie); its hours become the group total. Committed records are not
/// merged.
pub fn merge(records: &[WriteOff]) -> Vec<MergedWriteOff> {
    let mut out: Vec<MergedWriteOff> = Vec::new();

    for kind in [WriteOffKind::UserConfirmed, WriteOffKind::Pending] {
        let start = out.len();

        for r in records.iter().filter(|r| r.kind().ok() == Some(kind)) {
            match out[start..]
                .iter_mut()
                .find(|m| m.record.task_id == r.task_id)
            {
                Some(m) => {
                    let total = m.record.hours + r.hours;
                    if r.time > m.record.time {
                        m.record = r.clone();
                    }
                    m.record.hours = total;
                    m.sources += 1;
                }
                None => out.push(MergedWriteOff {
                    record: r.clone(),
                    sources: 1,
                }),
            }
        }
    }

    out
}
