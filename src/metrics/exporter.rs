use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::WitnessMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for witness metrics snapshots.
///
/// Writes the Prometheus text exposition format so it can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<WitnessMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &WitnessMetricsSnapshot) {
        self.write_metric("counter", "witness_calls_total", snapshot.witness_calls);
        self.write_metric("counter", "familiar_total", snapshot.familiar);
        self.write_metric("counter", "unfamiliar_total", snapshot.unfamiliar);
        self.write_metric("counter", "evictions_total", snapshot.evictions);
        self.write_metric("counter", "index_prunes_total", snapshot.index_prunes);
        self.write_metric(
            "counter",
            "retained_evictions_total",
            snapshot.retained_evictions,
        );
        self.write_metric("gauge", "len", snapshot.len as u64);
        self.write_metric("gauge", "capacity", snapshot.capacity as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("dedup", Vec::new());
        exporter.export(&WitnessMetricsSnapshot {
            witness_calls: 5,
            familiar: 2,
            unfamiliar: 3,
            len: 4,
            capacity: 8,
            ..Default::default()
        });

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE dedup_witness_calls_total counter\n"));
        assert!(text.contains("dedup_familiar_total 2\n"));
        assert!(text.contains("# TYPE dedup_capacity gauge\n"));
        assert!(text.contains("dedup_len 4\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&WitnessMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("\nwitness_calls_total 0\n"));
    }
}
