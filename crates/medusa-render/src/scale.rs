//! Linear scales and tick generation for the plot axes.

/// Maps a numeric domain onto a pixel range. Either side may be inverted
/// (descending domain, or a top-down y range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn scale(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            // Degenerate domain: everything collapses to the range midpoint.
            return (self.r0 + self.r1) / 2.0;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }

    /// Roughly `count` human-friendly tick values (multiples of 1, 2 or 5
    /// times a power of ten) covering the domain, in domain order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.d0, self.d1, count)
    }
}

pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut out = if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) * step).collect::<Vec<_>>()
    } else {
        let inv = -step;
        let first = (lo * inv).ceil();
        let last = (hi * inv).floor();
        let n = (last - first + 1.0).max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) / inv).collect::<Vec<_>>()
    };

    if reverse {
        out.reverse();
    }
    out
}

/// The tick step for a domain: positive for steps >= 1, negative inverse for
/// fractional steps (so the caller divides instead of multiplying, avoiding
/// float drift).
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
    const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
    const E2: f64 = std::f64::consts::SQRT_2;

    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}
