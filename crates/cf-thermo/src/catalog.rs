//! Static compound catalog (molar masses and NASA 7-term polynomials).
//!
//! Polynomial data are the GRI-Mech 3.0 thermodynamic fits, split at 1000 K.

use crate::compound::{ChemicalCompound, CompoundType, Element};

static COMPOUND_CATALOG: [ChemicalCompound; CompoundType::COUNT] = [
    ChemicalCompound {
        kind: CompoundType::CH4,
        name: "CH4",
        molar_mass: 16.04246,
        atoms: &[(Element::C, 1), (Element::H, 4)],
        low: [
            5.149_876_13,
            -1.367_097_88e-2,
            4.918_005_99e-5,
            -4.847_430_26e-8,
            1.666_939_56e-11,
            -1.024_664_76e4,
            -4.641_303_76,
        ],
        high: [
            7.485_149_50e-2,
            1.339_094_67e-2,
            -5.732_858_09e-6,
            1.222_925_35e-9,
            -1.018_152_30e-13,
            -9.468_344_59e3,
            1.843_731_80e1,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::O2,
        name: "O2",
        molar_mass: 31.9988,
        atoms: &[(Element::O, 2)],
        low: [
            3.782_456_36,
            -2.996_734_16e-3,
            9.847_302_01e-6,
            -9.681_295_09e-9,
            3.243_728_37e-12,
            -1.063_943_56e3,
            3.657_675_73,
        ],
        high: [
            3.282_537_84,
            1.483_087_54e-3,
            -7.579_666_69e-7,
            2.094_705_55e-10,
            -2.167_177_94e-14,
            -1.088_457_72e3,
            5.453_231_29,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::H2O,
        name: "H2O",
        molar_mass: 18.01528,
        atoms: &[(Element::H, 2), (Element::O, 1)],
        low: [
            4.198_640_56,
            -2.036_434_10e-3,
            6.520_402_11e-6,
            -5.487_970_62e-9,
            1.771_978_17e-12,
            -3.029_372_67e4,
            -8.490_322_08e-1,
        ],
        high: [
            3.033_992_49,
            2.176_918_04e-3,
            -1.640_725_18e-7,
            -9.704_198_70e-11,
            1.682_009_92e-14,
            -3.000_429_71e4,
            4.966_770_10,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::CO2,
        name: "CO2",
        molar_mass: 44.0095,
        atoms: &[(Element::C, 1), (Element::O, 2)],
        low: [
            2.356_773_52,
            8.984_596_77e-3,
            -7.123_562_69e-6,
            2.459_190_22e-9,
            -1.436_995_48e-13,
            -4.837_196_97e4,
            9.901_052_22,
        ],
        high: [
            3.857_460_29,
            4.414_370_26e-3,
            -2.214_814_04e-6,
            5.234_901_88e-10,
            -4.720_841_64e-14,
            -4.875_916_60e4,
            2.271_638_06,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::CO,
        name: "CO",
        molar_mass: 28.0101,
        atoms: &[(Element::C, 1), (Element::O, 1)],
        low: [
            3.579_533_47,
            -6.103_536_80e-4,
            1.016_814_33e-6,
            9.070_058_84e-10,
            -9.044_244_99e-13,
            -1.434_408_60e4,
            3.508_409_28,
        ],
        high: [
            2.715_185_61,
            2.062_527_43e-3,
            -9.988_257_71e-7,
            2.300_530_08e-10,
            -2.036_477_16e-14,
            -1.415_187_24e4,
            7.818_687_72,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::H2,
        name: "H2",
        molar_mass: 2.01588,
        atoms: &[(Element::H, 2)],
        low: [
            2.344_331_12,
            7.980_520_75e-3,
            -1.947_815_10e-5,
            2.015_720_94e-8,
            -7.376_117_61e-12,
            -9.179_351_73e2,
            6.830_102_38e-1,
        ],
        high: [
            3.337_279_20,
            -4.940_247_31e-5,
            4.994_567_78e-7,
            -1.795_663_94e-10,
            2.002_553_76e-14,
            -9.501_589_22e2,
            -3.205_023_31,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::OH,
        name: "OH",
        molar_mass: 17.00734,
        atoms: &[(Element::O, 1), (Element::H, 1)],
        low: [
            3.992_015_43,
            -2.401_317_52e-3,
            4.617_938_41e-6,
            -3.881_133_33e-9,
            1.364_114_70e-12,
            3.615_080_56e3,
            -1.039_254_58e-1,
        ],
        high: [
            3.092_887_67,
            5.484_297_16e-4,
            1.265_052_28e-7,
            -8.794_615_56e-11,
            1.174_123_76e-14,
            3.858_657_00e3,
            4.476_696_10,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::O,
        name: "O",
        molar_mass: 15.9994,
        atoms: &[(Element::O, 1)],
        low: [
            3.168_267_10,
            -3.279_318_84e-3,
            6.643_063_96e-6,
            -6.128_066_24e-9,
            2.112_659_71e-12,
            2.912_225_92e4,
            2.051_933_46,
        ],
        high: [
            2.569_420_78,
            -8.597_411_37e-5,
            4.194_845_89e-8,
            -1.001_777_99e-11,
            1.228_336_91e-15,
            2.921_757_91e4,
            4.784_338_64,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::H,
        name: "H",
        molar_mass: 1.00794,
        atoms: &[(Element::H, 1)],
        low: [
            2.5,
            7.053_328_19e-13,
            -1.995_919_64e-15,
            2.300_816_32e-18,
            -9.277_323_32e-22,
            2.547_365_99e4,
            -4.466_828_53e-1,
        ],
        high: [
            2.500_000_01,
            -2.308_429_73e-11,
            1.615_619_48e-14,
            -4.735_152_35e-18,
            4.981_973_57e-22,
            2.547_365_99e4,
            -4.466_829_14e-1,
        ],
    },
    ChemicalCompound {
        kind: CompoundType::He,
        name: "He",
        molar_mass: 4.002602,
        atoms: &[(Element::He, 1)],
        low: [2.5, 0.0, 0.0, 0.0, 0.0, -7.453_750e2, 9.287_239_74e-1],
        high: [2.5, 0.0, 0.0, 0.0, 0.0, -7.453_750e2, 9.287_239_74e-1],
    },
    ChemicalCompound {
        kind: CompoundType::N2,
        name: "N2",
        molar_mass: 28.0134,
        atoms: &[(Element::N, 2)],
        low: [
            3.298_677,
            1.408_240_4e-3,
            -3.963_222e-6,
            5.641_515e-9,
            -2.444_854e-12,
            -1.020_899_9e3,
            3.950_372,
        ],
        high: [
            2.926_64,
            1.487_976_8e-3,
            -5.684_760e-7,
            1.009_703_8e-10,
            -6.753_351e-15,
            -9.227_977e2,
            5.980_528,
        ],
    },
];

/// Every compound in the catalog, ordered by [`CompoundType`] discriminant.
pub fn compound_catalog() -> &'static [ChemicalCompound] {
    &COMPOUND_CATALOG
}

/// Look up a compound by type.
#[inline]
pub fn compound(kind: CompoundType) -> &'static ChemicalCompound {
    &COMPOUND_CATALOG[kind.index()]
}
