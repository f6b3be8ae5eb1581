use crate::PackError;
use crate::geometry::{Orientation, Rect};

/// The load space of a truck. All trucks of a packing run share the same dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub fn try_new(width: f32, height: f32) -> Result<Self, PackError> {
        // written so that NaN is rejected as well
        if !(width > 0.0 && height > 0.0) {
            return Err(PackError::InvalidContainerSize { width, height });
        }
        Ok(Container { width, height })
    }

    /// The load space as a rectangle anchored at the origin
    pub fn bbox(&self) -> Rect {
        Rect::from_origin(0.0, 0.0, self.width, self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True if a unit in `orientation` fits in an empty truck.
    pub fn fits(&self, orientation: &Orientation) -> bool {
        orientation.fits_in(&self.bbox())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 800.0; "zero width")]
    #[test_case(1200.0, 0.0; "zero height")]
    #[test_case(-5.0, 800.0; "negative width")]
    #[test_case(f32::NAN, 800.0; "nan width")]
    fn rejects_invalid_sizes(width: f32, height: f32) {
        assert!(matches!(
            Container::try_new(width, height),
            Err(PackError::InvalidContainerSize { .. })
        ));
    }

    #[test]
    fn fits_checks_both_sides() {
        let container = Container::try_new(1200.0, 800.0).unwrap();
        let fits = |width, height| {
            container.fits(&Orientation {
                width,
                height,
                rotated: false,
            })
        };
        assert!(fits(1200.0, 800.0));
        assert!(!fits(1300.0, 300.0));
        assert!(!fits(300.0, 1300.0));
    }
}
