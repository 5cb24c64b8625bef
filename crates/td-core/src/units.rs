// td-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration,
    DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength, Mass as UomMass,
    MassDensity as UomMassDensity, Pressure as UomPressure,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
/// Kinematic viscosity (m²/s); uom files it under diffusion coefficient.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.807;

    #[inline]
    pub fn g0() -> Accel {
        mps2(G0_MPS2)
    }
}
