//! Linear colour ramps and Google Earth colour strings.

/// Evenly spaced RGB stops, interpolated linearly.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    stops: Vec<[f64; 3]>,
}

/// Headwind magnitude mapped onto the full ramp, m/s.
const HEADWIND_CAP_MPS: f64 = 50.0;

/// Wind speed mapped onto the full ramp, m/s.
const WIND_SPEED_CAP_MPS: f64 = 100.0;

impl ColorMap {
    pub fn from_rgb(stops: &[[u8; 3]]) -> Self {
        Self {
            stops: stops
                .iter()
                .map(|c| [c[0] as f64 / 255.0, c[1] as f64 / 255.0, c[2] as f64 / 255.0])
                .collect(),
        }
    }

    /// Red for headwind through white to green for tailwind.
    pub fn headwind() -> Self {
        Self::from_rgb(&[
            [0xFF, 0x3F, 0x3F], // red
            [0xFF, 0xCF, 0x00], // orange
            [0xFF, 0xFF, 0xFF], // white
            [0x00, 0x3F, 0xFF], // blue
            [0x3F, 0xFF, 0x3F], // green
        ])
    }

    /// Dark through green and orange to pale violet, one stop per 10 m/s.
    pub fn wind_speed() -> Self {
        Self::from_rgb(&[
            [0x04, 0x09, 0x1B],
            [0x00, 0xC2, 0xA4],
            [0x2B, 0xFB, 0x00],
            [0xDD, 0x7E, 0x00],
            [0xF0, 0x00, 0x55],
            [0xBA, 0x15, 0xBA],
            [0xC8, 0x46, 0xC8],
            [0xD6, 0x74, 0xD6],
            [0xE4, 0xA4, 0xE4],
            [0xF1, 0xD1, 0xF1],
            [0xFF, 0xFF, 0xFF],
        ])
    }

    /// Colour at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> [f64; 3] {
        match self.stops.len() {
            0 => return [0.0, 0.0, 0.0],
            1 => return self.stops[0],
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (self.stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = scaled - lower as f64;
        let (a, b) = (self.stops[lower], self.stops[lower + 1]);
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }

    /// Google Earth `aabbggrr` string for `t`, fully opaque.
    pub fn kml_color(&self, t: f64) -> String {
        let [r, g, b] = self.sample(t).map(channel);
        format!("FF{b:02x}{g:02x}{r:02x}")
    }

    /// Colour for a signed headwind, saturating at ±50 m/s.
    pub fn headwind_color(&self, headwind_mps: f64) -> String {
        let capped = headwind_mps.clamp(-HEADWIND_CAP_MPS, HEADWIND_CAP_MPS);
        self.kml_color((capped + HEADWIND_CAP_MPS) / (2.0 * HEADWIND_CAP_MPS))
    }

    /// Colour for a wind speed, saturating at 100 m/s.
    pub fn wind_speed_color(&self, magnitude_mps: f64) -> String {
        self.kml_color(magnitude_mps.min(WIND_SPEED_CAP_MPS) / WIND_SPEED_CAP_MPS)
    }
}

fn channel(value: f64) -> u8 {
    ((value * 256.0) as i64).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let map = ColorMap::headwind();
        assert_eq!(map.kml_color(0.0), "FF3f3fff");
        assert_eq!(map.kml_color(1.0), "FF3fff3f");
        assert_eq!(map.kml_color(0.5), "FFffffff");
    }

    #[test]
    fn headwind_color_saturates() {
        let map = ColorMap::headwind();
        assert_eq!(map.headwind_color(-80.0), map.kml_color(0.0));
        assert_eq!(map.headwind_color(80.0), map.kml_color(1.0));
        assert_eq!(map.headwind_color(0.0), "FFffffff");
    }

    #[test]
    fn interpolates_between_stops() {
        let map = ColorMap::from_rgb(&[[0, 0, 0], [255, 255, 255]]);
        let mid = map.sample(0.5);
        assert!((mid[0] - 0.5).abs() < 1e-12);
        assert_eq!(map.kml_color(0.5), "FF808080");
    }

    #[test]
    fn wind_speed_ramp_is_clamped() {
        let map = ColorMap::wind_speed();
        assert_eq!(map.wind_speed_color(250.0), "FFffffff");
        assert_eq!(map.wind_speed_color(0.0), "FF1b0904");
    }
}
