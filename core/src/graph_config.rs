/// Movies released in this year carry weight 1 in weighted mode.
pub const ANCHOR_YEAR: i32 = 2019;

/// Configuration for building the actor graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Derive edge weights from the movie year (default: every edge weighs 1)
    pub weighted: bool,
    /// Year that maps to the lightest weighted edge
    pub anchor_year: i32,
}

impl GraphConfig {
    pub fn new(weighted: bool) -> Self {
        Self {
            weighted,
            anchor_year: ANCHOR_YEAR,
        }
    }

    pub fn with_anchor_year(mut self, anchor_year: i32) -> Self {
        self.anchor_year = anchor_year;
        self
    }

    /// Weight of an edge created for a movie released in `year`.
    ///
    /// Weighted mode uses `1 + (anchor_year - year)`, floored at 0 so that
    /// movies newer than the anchor never produce a negative edge.
    pub fn edge_weight(&self, year: i32) -> u32 {
        if !self.weighted {
            return 1;
        }

        let weight = 1 + i64::from(self.anchor_year) - i64::from(year);
        u32::try_from(weight.max(0)).unwrap_or(u32::MAX)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(false)
    }
}
