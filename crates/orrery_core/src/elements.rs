//! Mean Keplerian elements of the planets and the Earth–Moon barycenter.
//!
//! Referred to the mean ecliptic and equinox of J2000. Each element is
//! `value + rate · T` with `T` in Julian centuries since J2000.0.
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions
//! of the Major Planets", JPL Solar System Dynamics, Table 1
//! (fit interval 1800 AD – 2050 AD).

/// One element set: `[value, rate per century]` for each element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU).
    pub a: [f64; 2],
    /// Eccentricity.
    pub e: [f64; 2],
    /// Inclination (deg).
    pub i: [f64; 2],
    /// Mean longitude (deg).
    pub l: [f64; 2],
    /// Longitude of perihelion (deg).
    pub peri: [f64; 2],
    /// Longitude of the ascending node (deg).
    pub node: [f64; 2],
}

/// Elements evaluated at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAt {
    pub a: f64,
    pub e: f64,
    pub i_deg: f64,
    pub l_deg: f64,
    pub peri_deg: f64,
    pub node_deg: f64,
}

impl OrbitalElements {
    /// Evaluate the linear element model at `t` centuries past J2000.0.
    pub fn at(&self, t: f64) -> ElementsAt {
        let eval = |p: [f64; 2]| p[0] + p[1] * t;
        ElementsAt {
            a: eval(self.a),
            e: eval(self.e),
            i_deg: eval(self.i),
            l_deg: eval(self.l),
            peri_deg: eval(self.peri),
            node_deg: eval(self.node),
        }
    }
}

#[rustfmt::skip]
pub const MERCURY: OrbitalElements = OrbitalElements {
    a:    [ 0.387_099_27,    0.000_000_37],
    e:    [ 0.205_635_93,    0.000_019_06],
    i:    [ 7.004_979_02,   -0.005_947_49],
    l:    [252.250_323_50, 149_472.674_111_75],
    peri: [ 77.457_796_28,   0.160_476_89],
    node: [ 48.330_765_93,  -0.125_340_81],
};

#[rustfmt::skip]
pub const VENUS: OrbitalElements = OrbitalElements {
    a:    [ 0.723_335_66,    0.000_003_90],
    e:    [ 0.006_776_72,   -0.000_041_07],
    i:    [ 3.394_676_05,   -0.000_788_90],
    l:    [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18,   0.002_683_29],
    node: [ 76.679_842_55,  -0.277_694_18],
};

#[rustfmt::skip]
pub const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a:    [ 1.000_002_61,    0.000_005_62],
    e:    [ 0.016_711_23,   -0.000_043_92],
    i:    [-0.000_015_31,   -0.012_946_68],
    l:    [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93,   0.323_273_64],
    node: [  0.0,            0.0],
};

#[rustfmt::skip]
pub const MARS: OrbitalElements = OrbitalElements {
    a:    [ 1.523_710_34,    0.000_018_47],
    e:    [ 0.093_394_10,    0.000_078_82],
    i:    [ 1.849_691_42,   -0.008_131_31],
    l:    [ -4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59,   0.444_410_88],
    node: [ 49.559_538_91,  -0.292_573_43],
};

#[rustfmt::skip]
pub const JUPITER: OrbitalElements = OrbitalElements {
    a:    [ 5.202_887_00,   -0.000_116_07],
    e:    [ 0.048_386_24,   -0.000_132_53],
    i:    [ 1.304_396_95,   -0.001_837_14],
    l:    [ 34.396_440_51, 3_034.746_127_75],
    peri: [ 14.728_479_83,   0.212_526_68],
    node: [100.473_909_09,   0.204_691_06],
};

#[rustfmt::skip]
pub const SATURN: OrbitalElements = OrbitalElements {
    a:    [ 9.536_675_94,   -0.001_250_60],
    e:    [ 0.053_861_79,   -0.000_509_91],
    i:    [ 2.485_991_87,    0.001_936_09],
    l:    [ 49.954_244_23, 1_222.493_622_01],
    peri: [ 92.598_878_31,  -0.418_972_16],
    node: [113.662_424_48,  -0.288_677_94],
};

#[rustfmt::skip]
pub const URANUS: OrbitalElements = OrbitalElements {
    a:    [19.189_164_64,   -0.001_961_76],
    e:    [ 0.047_257_44,   -0.000_043_97],
    i:    [ 0.772_637_83,   -0.002_429_39],
    l:    [313.238_104_51,  428.482_027_85],
    peri: [170.954_276_30,   0.408_052_81],
    node: [ 74.016_925_03,   0.042_405_89],
};

#[rustfmt::skip]
pub const NEPTUNE: OrbitalElements = OrbitalElements {
    a:    [30.069_922_76,    0.000_262_91],
    e:    [ 0.008_590_48,    0.000_051_05],
    i:    [ 1.770_043_47,    0.000_353_72],
    l:    [-55.120_029_69,  218.459_453_25],
    peri: [ 44.964_762_27,  -0.322_414_64],
    node: [131.784_225_74,  -0.005_086_64],
};

#[rustfmt::skip]
pub const PLUTO: OrbitalElements = OrbitalElements {
    a:    [39.482_116_75,   -0.000_315_96],
    e:    [ 0.248_827_30,    0.000_051_70],
    i:    [17.140_012_06,    0.000_048_18],
    l:    [238.929_038_33,  145.207_805_15],
    peri: [224.068_916_29,  -0.040_629_42],
    node: [110.303_936_84,  -0.011_834_82],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_epoch_returns_base_values() {
        let el = MARS.at(0.0);
        assert_eq!(el.a, 1.523_710_34);
        assert_eq!(el.l_deg, -4.553_432_05);
    }

    #[test]
    fn rates_apply_linearly() {
        let el = EARTH_MOON_BARYCENTER.at(1.0);
        assert!((el.l_deg - (100.464_571_66 + 35_999.372_449_81)).abs() < 1e-9);
    }

    #[test]
    fn eccentricities_are_elliptic() {
        for el in [MERCURY, VENUS, EARTH_MOON_BARYCENTER, MARS, JUPITER, SATURN, URANUS, NEPTUNE, PLUTO] {
            let e = el.at(0.5).e;
            assert!((0.0..1.0).contains(&e), "e = {e}");
        }
    }
}
