/// Divides a running sum by its sample count. Returns 0.0 when nothing was counted.
pub fn average(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
