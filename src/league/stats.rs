//! Per-manager derived statistics.

use crate::store::models::Manager;

/// Career win fraction in `[0, 1]`.
///
/// Zero when the manager has no decided games or no recorded seasons, so the
/// result is never NaN or infinite.
pub fn win_percentage(manager: &Manager) -> f64 {
    let decided = manager.total_wins + manager.total_losses;
    if decided == 0 || manager.total_seasons == 0 {
        return 0.0;
    }
    f64::from(manager.total_wins) / f64::from(decided)
}

/// Win percentage as shown on manager cards, e.g. `"56.5"`.
pub fn win_percentage_display(manager: &Manager) -> String {
    format!("{:.1}", win_percentage(manager) * 100.0)
}

/// Legacy points per season played; zero for a manager with no seasons.
pub fn lp_avg(manager: &Manager) -> f64 {
    if manager.total_seasons == 0 {
        return 0.0;
    }
    manager.legacy_points / f64::from(manager.total_seasons)
}

pub fn lp_avg_display(manager: &Manager) -> String {
    format!("{:.2}", lp_avg(manager))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::test_support::manager;

    #[test]
    fn test_win_percentage() {
        let mut m = manager("m1", "Derek");
        m.total_seasons = 3;
        m.total_wins = 26;
        m.total_losses = 20;
        assert!((win_percentage(&m) - 26.0 / 46.0).abs() < 1e-12);
        assert_eq!(win_percentage_display(&m), "56.5");
    }

    #[test]
    fn test_win_percentage_zero_denominator() {
        let mut m = manager("m1", "Rookie");
        m.total_seasons = 1;
        assert_eq!(win_percentage(&m), 0.0);
        assert_eq!(win_percentage_display(&m), "0.0");
    }

    #[test]
    fn test_no_seasons_is_all_zero() {
        let m = manager("m1", "New Guy");
        assert_eq!(lp_avg(&m), 0.0);
        assert_eq!(lp_avg_display(&m), "0.00");
        assert_eq!(win_percentage_display(&m), "0.0");
        assert!(lp_avg(&m).is_finite());
        assert!(win_percentage(&m).is_finite());
    }

    #[test]
    fn test_lp_avg() {
        let mut m = manager("m1", "Derek");
        m.legacy_points = 25.0;
        m.total_seasons = 4;
        assert_eq!(lp_avg(&m), 6.25);
        assert_eq!(lp_avg_display(&m), "6.25");
    }
}
