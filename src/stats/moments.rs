// ---------------------------------------------------------------------------
// Welford running moments
// ---------------------------------------------------------------------------

/// Single-pass accumulator for count, mean, variance and range.
///
/// ```text
/// δ₁ = x_k − μ_{k−1}
/// μ_k = μ_{k−1} + δ₁ / k
/// M₂_k = M₂_{k−1} + δ₁ × (x_k − μ_k)
/// ```
#[derive(Debug, Clone)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` until a value has been seen.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Sample variance (n − 1 denominator). NaN for fewer than two values.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation. NaN for fewer than two values.
    pub fn sample_std_dev(&self) -> f64 {
        self.sample_variance().sqrt()
    }
}

impl Default for Moments {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Moments::new();
        for v in iter {
            acc.update(v);
        }
        acc
    }
}

// ---------------------------------------------------------------------------
// Paired co-moments (for Pearson correlation)
// ---------------------------------------------------------------------------

/// Online accumulator of the co-moment of two variables.
#[derive(Debug, Clone, Default)]
pub struct CoMoments {
    count: usize,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    c_xy: f64,
}

impl CoMoments {
    pub fn update(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;
        let dx = x - self.mean_x;
        let dy = y - self.mean_y;
        self.mean_x += dx / n;
        self.mean_y += dy / n;
        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.c_xy += dx * (y - self.mean_y);
    }

    /// Pearson's r, clamped to [-1, 1]. NaN when either variable has zero
    /// variance or fewer than two pairs were seen.
    pub fn pearson(&self) -> f64 {
        if self.count < 2 || self.m2_x <= 0.0 || self.m2_y <= 0.0 {
            return f64::NAN;
        }
        (self.c_xy / (self.m2_x.sqrt() * self.m2_y.sqrt())).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welford_matches_textbook_values() {
        let acc: Moments = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
        assert_eq!(acc.count(), 8);
        assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
        assert!((acc.sample_variance() - 4.571428571428571).abs() < 1e-10);
        assert_eq!(acc.min(), Some(2.0));
        assert_eq!(acc.max(), Some(9.0));
    }

    #[test]
    fn single_value_has_undefined_std_dev() {
        let acc: Moments = [3.0].into_iter().collect();
        assert_eq!(acc.mean(), Some(3.0));
        assert!(acc.sample_std_dev().is_nan());
    }

    #[test]
    fn empty_accumulator_has_no_mean() {
        let acc = Moments::new();
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.min(), None);
        assert_eq!(acc.max(), None);
    }

    #[test]
    fn pearson_of_linear_relation() {
        let mut pos = CoMoments::default();
        let mut neg = CoMoments::default();
        for i in 0..10 {
            let x = i as f64;
            pos.update(x, 2.0 * x + 1.0);
            neg.update(x, -0.5 * x);
        }
        assert!((pos.pearson() - 1.0).abs() < 1e-12);
        assert!((neg.pearson() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_with_constant_variable_is_nan() {
        let mut acc = CoMoments::default();
        for i in 0..5 {
            acc.update(i as f64, 4.2);
        }
        assert!(acc.pearson().is_nan());
    }
}
