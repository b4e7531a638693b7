/// Largest integer id among `ids`. Ids that do not parse (the inbox sentinel)
/// are ignored, and the record count never enters into it.
fn max_numeric_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> u64 {
    ids.into_iter()
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

/// High-water mark for sequential string ids.
///
/// Starts one past the largest id of the seed records and only moves up, so
/// an id freed by a delete (even the current maximum) is never handed out again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn after<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            last: max_numeric_id(ids),
        }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}
