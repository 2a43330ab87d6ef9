/// Point-in-time witness counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WitnessMetricsSnapshot {
    pub witness_calls: u64,
    pub familiar: u64,
    pub unfamiliar: u64,

    pub evictions: u64,
    pub index_prunes: u64,
    pub retained_evictions: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl WitnessMetricsSnapshot {
    /// Fraction of witness calls that reported familiar content.
    pub fn familiar_ratio(&self) -> f64 {
        if self.witness_calls == 0 {
            return 0.0;
        }
        self.familiar as f64 / self.witness_calls as f64
    }

    /// Sums counters and gauges, e.g. across shards.
    pub fn merge(self, other: Self) -> Self {
        Self {
            witness_calls: self.witness_calls + other.witness_calls,
            familiar: self.familiar + other.familiar,
            unfamiliar: self.unfamiliar + other.unfamiliar,
            evictions: self.evictions + other.evictions,
            index_prunes: self.index_prunes + other.index_prunes,
            retained_evictions: self.retained_evictions + other.retained_evictions,
            len: self.len + other.len,
            capacity: self.capacity + other.capacity,
        }
    }
}
