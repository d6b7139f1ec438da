//! Time-based animation helpers
//!
//! Every animation in the preview is a pure function of elapsed seconds, so the
//! painter only has to remember when a layer was mounted.

/// Linear interpolation across evenly spaced keyframes, `progress` in [0,1]
pub fn sample_keyframes(keyframes: &[f32], progress: f32) -> f32 {
    match keyframes {
        [] => 0.0,
        [only] => *only,
        _ => {
            let progress = progress.clamp(0.0, 1.0);
            let segments = (keyframes.len() - 1) as f32;
            let position = progress * segments;
            let index = (position.floor() as usize).min(keyframes.len() - 2);
            let local = position - index as f32;
            let (from, to) = (keyframes[index], keyframes[index + 1]);
            from + (to - from) * ease_in_out(local)
        }
    }
}

/// Progress of an infinite loop restarting every `period` seconds
pub fn looping_progress(elapsed: f64, period: f32) -> f32 {
    if period <= 0.0 || !elapsed.is_finite() {
        return 0.0;
    }
    (elapsed.rem_euclid(period as f64) / period as f64) as f32
}

/// Progress of an infinite loop that plays forwards then backwards,
/// each leg taking `duration` seconds
pub fn reverse_alternating_progress(elapsed: f64, duration: f32) -> f32 {
    if duration <= 0.0 || !elapsed.is_finite() {
        return 0.0;
    }
    let phase = elapsed.rem_euclid(2.0 * duration as f64) / duration as f64;
    if phase <= 1.0 {
        phase as f32
    } else {
        (2.0 - phase) as f32
    }
}

/// Eased progress of a one-shot animation that starts after `delay` seconds
pub fn entrance_progress(elapsed: f64, delay: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    let t = ((elapsed - delay) / duration).clamp(0.0, 1.0) as f32;
    ease_out(t)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_keyframes_hit_their_values() {
        let frames = [1.0, 1.1, 1.0];
        assert!((sample_keyframes(&frames, 0.0) - 1.0).abs() < EPS);
        assert!((sample_keyframes(&frames, 0.5) - 1.1).abs() < EPS);
        assert!((sample_keyframes(&frames, 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_keyframes_stay_within_bounds() {
        let frames = [0.3, 0.7, 0.3];
        for step in 0..=100 {
            let value = sample_keyframes(&frames, step as f32 / 100.0);
            assert!((0.3 - EPS..=0.7 + EPS).contains(&value));
        }
        // Progress outside [0,1] is clamped
        assert!((sample_keyframes(&frames, 3.0) - 0.3).abs() < EPS);
    }

    #[test]
    fn test_degenerate_keyframes() {
        assert_eq!(sample_keyframes(&[], 0.5), 0.0);
        assert_eq!(sample_keyframes(&[0.4], 0.9), 0.4);
    }

    #[test]
    fn test_looping_progress_repeats() {
        assert!((looping_progress(1.0, 4.0) - 0.25).abs() < EPS);
        assert!((looping_progress(5.0, 4.0) - 0.25).abs() < EPS);
        assert_eq!(looping_progress(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_reverse_alternating_progress_bounces() {
        assert!((reverse_alternating_progress(0.5, 2.0) - 0.25).abs() < EPS);
        assert!((reverse_alternating_progress(2.0, 2.0) - 1.0).abs() < EPS);
        assert!((reverse_alternating_progress(3.0, 2.0) - 0.5).abs() < EPS);
        assert!((reverse_alternating_progress(4.0, 2.0)).abs() < EPS);
        assert_eq!(reverse_alternating_progress(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_entrance_progress() {
        assert_eq!(entrance_progress(0.0, 0.2, 0.8), 0.0);
        assert_eq!(entrance_progress(0.2, 0.2, 0.8), 0.0);
        assert_eq!(entrance_progress(1.0, 0.2, 0.8), 1.0);
        assert_eq!(entrance_progress(50.0, 0.2, 0.8), 1.0);

        let mid = entrance_progress(0.6, 0.2, 0.8);
        assert!(mid > 0.5 && mid < 1.0);
    }
}
