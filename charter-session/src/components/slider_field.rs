//! Bounded numeric inputs for the pricing scenario.

/// Label, hint and bounds of one numeric scenario input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderField {
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderField {
    /// Clamp into range and snap to the nearest step from `min`.
    ///
    /// Non-finite input falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let bounded = value.clamp(self.min, self.max);
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}

pub const AVG_WIND: SliderField = SliderField {
    label: "Avg Wind (kts)",
    hint: Some("Headwind positive, tailwind negative"),
    min: -50.0,
    max: 50.0,
    step: 1.0,
};

pub const MARGIN: SliderField = SliderField {
    label: "Margin %",
    hint: None,
    min: 0.0,
    max: 60.0,
    step: 1.0,
};

pub const TAXI: SliderField = SliderField {
    label: "Taxi (min)",
    hint: Some("Estimated taxi time from gate to takeoff or after landing."),
    min: 0.0,
    max: 40.0,
    step: 5.0,
};

pub const REPOSITION: SliderField = SliderField {
    label: "Reposition (nm)",
    hint: Some("Distance flown to move the aircraft before or after the trip."),
    min: 0.0,
    max: 500.0,
    step: 10.0,
};

pub const OAT_DEPART: SliderField = SliderField {
    label: "OAT Depart (°C)",
    hint: Some("Outside air temperature at the departure airport."),
    min: -10.0,
    max: 45.0,
    step: 1.0,
};

pub const OAT_ARRIVE: SliderField = SliderField {
    label: "OAT Arrive (°C)",
    hint: Some("Outside air temperature at the arrival airport."),
    min: -10.0,
    max: 45.0,
    step: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(AVG_WIND.clamp(80.0), 50.0);
        assert_eq!(AVG_WIND.clamp(-80.0), -50.0);
        assert_eq!(OAT_DEPART.clamp(-40.0), -10.0);
    }

    #[test]
    fn snaps_to_step() {
        assert_eq!(TAXI.clamp(12.0), 10.0);
        assert_eq!(TAXI.clamp(13.0), 15.0);
        assert_eq!(REPOSITION.clamp(247.0), 250.0);
        assert_eq!(MARGIN.clamp(20.4), 20.0);
    }

    #[test]
    fn nan_falls_back_to_min() {
        assert_eq!(MARGIN.clamp(f64::NAN), 0.0);
    }
}
