/// Short display form of an energy amount: `1.50M`, `12.3k`, `4.5`, `42`.
pub fn format_energy(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    if n >= 1e6 {
        return format!("{:.2}M", n / 1e6);
    }
    if n >= 1e3 {
        return format!("{:.1}k", n / 1e3);
    }
    if n > 0.0 && n < 10.0 {
        return format!("{n:.1}");
    }
    format!("{}", n.floor())
}
