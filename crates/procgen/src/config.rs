use crate::error::GeometryError;

/// Resolution of the unit UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereConfig {
    /// Number of latitude bands (polar angle steps).
    pub vertical_cuts: u32,
    /// Number of longitude columns per ring.
    pub horizontal_cuts: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            vertical_cuts: 32,
            horizontal_cuts: 64,
        }
    }
}

impl SphereConfig {
    pub fn validate(&self) -> Result<(), GeometryError> {
        positive_u32("vertical_cuts", self.vertical_cuts)?;
        positive_u32("horizontal_cuts", self.horizontal_cuts)?;
        Ok(())
    }
}

/// Parameters of the composite vessel.
///
/// The vessel stands on the XZ plane: the outer wall spans `0..height` at
/// `external_radius`, the inner wall spans `bottom_border..height` at
/// `internal_radius`, and the gap between the two is the wall thickness
/// closed off by the rim annulus and the solid bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselConfig {
    /// Angular resolution (columns) of both cylinder walls.
    pub definition: u32,
    pub height: f32,
    pub internal_radius: f32,
    pub external_radius: f32,
    /// Thickness of the solid bottom; the inner floor sits this far above
    /// the outer bottom.
    pub bottom_border: f32,
    /// Angular resolution of the handle along both torus directions.
    pub torus_definition: u32,
    /// Minor (tube) radius of the handle.
    pub tube_radius: f32,
    /// Major radius of the handle.
    pub torus_radius: f32,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            definition: 48,
            height: 1.0,
            internal_radius: 0.42,
            external_radius: 0.5,
            bottom_border: 0.08,
            torus_definition: 24,
            tube_radius: 0.05,
            torus_radius: 0.25,
        }
    }
}

impl VesselConfig {
    pub fn validate(&self) -> Result<(), GeometryError> {
        positive_u32("definition", self.definition)?;
        positive_u32("torus_definition", self.torus_definition)?;
        positive_f32("height", self.height)?;
        positive_f32("internal_radius", self.internal_radius)?;
        positive_f32("external_radius", self.external_radius)?;
        positive_f32("bottom_border", self.bottom_border)?;
        positive_f32("tube_radius", self.tube_radius)?;
        positive_f32("torus_radius", self.torus_radius)?;
        if self.external_radius <= self.internal_radius {
            return Err(GeometryError::RadiusOrder);
        }
        if self.bottom_border >= self.height {
            return Err(GeometryError::BorderTooTall);
        }
        Ok(())
    }
}

fn positive_u32(name: &'static str, value: u32) -> Result<(), GeometryError> {
    if value == 0 {
        return Err(GeometryError::NonPositiveParameter { name });
    }
    Ok(())
}

fn positive_f32(name: &'static str, value: f32) -> Result<(), GeometryError> {
    // Also rejects NaN.
    if value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositiveParameter { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs_validate() {
        assert_eq!(Ok(()), SphereConfig::default().validate());
        assert_eq!(Ok(()), VesselConfig::default().validate());
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let config = SphereConfig {
            vertical_cuts: 0,
            ..Default::default()
        };
        assert_eq!(
            Err(GeometryError::NonPositiveParameter {
                name: "vertical_cuts"
            }),
            config.validate()
        );

        let config = VesselConfig {
            torus_definition: 0,
            ..Default::default()
        };
        assert_eq!(
            Err(GeometryError::NonPositiveParameter {
                name: "torus_definition"
            }),
            config.validate()
        );
    }

    #[test]
    fn nan_radius_is_rejected() {
        let config = VesselConfig {
            tube_radius: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            Err(GeometryError::NonPositiveParameter {
                name: "tube_radius"
            }),
            config.validate()
        );
    }

    #[test]
    fn inverted_radii_are_rejected() {
        let config = VesselConfig {
            internal_radius: 0.5,
            external_radius: 0.42,
            ..Default::default()
        };
        assert_eq!(Err(GeometryError::RadiusOrder), config.validate());
    }

    #[test]
    fn bottom_border_must_stay_below_height() {
        let config = VesselConfig {
            height: 0.5,
            bottom_border: 0.5,
            ..Default::default()
        };
        assert_eq!(Err(GeometryError::BorderTooTall), config.validate());
    }
}
