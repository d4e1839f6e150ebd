//! Feature identifiers for the maize yield model

use std::fmt;

/// Number of features the yield model consumes
pub const FEATURE_COUNT: usize = 14;

/// One of the fourteen climate/production inputs.
///
/// Declaration order is the order the fields appear on the form, column by
/// column. The order the model was trained on is [`Feature::MODEL_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SoilTempL1,
    SoilTempL2,
    SoilTempL3,
    SoilTempL4,
    Temperature,
    PrecipitationEra5,
    PrecipitationChirps,
    AreaHarvestedUsda,
    AreaHarvestedFao,
    WindNorthward,
    SoilWaterL2,
    SoilWaterL4,
    ProductionUsda,
    ProductionFao,
}

impl Feature {
    /// All features in form (declaration) order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::SoilTempL1,
        Feature::SoilTempL2,
        Feature::SoilTempL3,
        Feature::SoilTempL4,
        Feature::Temperature,
        Feature::PrecipitationEra5,
        Feature::PrecipitationChirps,
        Feature::AreaHarvestedUsda,
        Feature::AreaHarvestedFao,
        Feature::WindNorthward,
        Feature::SoilWaterL2,
        Feature::SoilWaterL4,
        Feature::ProductionUsda,
        Feature::ProductionFao,
    ];

    /// Column order used by the trained model.
    ///
    /// Harvest/production figures come first, then soil temperatures and the
    /// remaining climate readings, with CHIRPS precipitation last. This is not
    /// the form order; the remap is deliberate and must match training.
    pub const MODEL_ORDER: [Feature; FEATURE_COUNT] = [
        Feature::AreaHarvestedUsda,
        Feature::ProductionUsda,
        Feature::AreaHarvestedFao,
        Feature::ProductionFao,
        Feature::SoilTempL1,
        Feature::SoilTempL2,
        Feature::SoilTempL3,
        Feature::SoilTempL4,
        Feature::Temperature,
        Feature::PrecipitationEra5,
        Feature::WindNorthward,
        Feature::SoilWaterL2,
        Feature::SoilWaterL4,
        Feature::PrecipitationChirps,
    ];

    /// Form layout: three columns of fields, top to bottom.
    pub const FORM_COLUMNS: [&'static [Feature]; 3] = [
        &[
            Feature::SoilTempL1,
            Feature::SoilTempL2,
            Feature::SoilTempL3,
            Feature::SoilTempL4,
        ],
        &[
            Feature::Temperature,
            Feature::PrecipitationEra5,
            Feature::PrecipitationChirps,
            Feature::AreaHarvestedUsda,
            Feature::AreaHarvestedFao,
        ],
        &[
            Feature::WindNorthward,
            Feature::SoilWaterL2,
            Feature::SoilWaterL4,
            Feature::ProductionUsda,
            Feature::ProductionFao,
        ],
    ];

    /// Position of this feature in form order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position of this feature in the model's input row.
    pub fn model_index(self) -> usize {
        Self::MODEL_ORDER
            .iter()
            .position(|&f| f == self)
            .unwrap_or_default()
    }

    /// Identifier used in training data.
    pub fn key(self) -> &'static str {
        match self {
            Feature::SoilTempL1 => "soil_temp_L1_C",
            Feature::SoilTempL2 => "soil_temp_L2_C",
            Feature::SoilTempL3 => "soil_temp_L3_C",
            Feature::SoilTempL4 => "soil_temp_L4_C",
            Feature::Temperature => "temp_C",
            Feature::PrecipitationEra5 => "precipitation_era5_mm",
            Feature::PrecipitationChirps => "precipitation_chirps_mm",
            Feature::AreaHarvestedUsda => "area_harvested_usda_1000ha",
            Feature::AreaHarvestedFao => "area_harvested_fao_1000ha",
            Feature::WindNorthward => "wind_northward_m_s",
            Feature::SoilWaterL2 => "soil_water_L2_fraction",
            Feature::SoilWaterL4 => "soil_water_L4_fraction",
            Feature::ProductionUsda => "production_usda_1000ha",
            Feature::ProductionFao => "production_fao_1000ha",
        }
    }

    /// Label shown next to the input field.
    pub fn label(self) -> &'static str {
        match self {
            Feature::SoilTempL1 => "Soil Temperature L1 (C)",
            Feature::SoilTempL2 => "Soil Temperature L2 (C)",
            Feature::SoilTempL3 => "Soil Temperature L3 (C)",
            Feature::SoilTempL4 => "Soil Temperature L4 (C)",
            Feature::Temperature => "Temperature (C)",
            Feature::PrecipitationEra5 => "Precipitation (ERA5, mm)",
            Feature::PrecipitationChirps => "Precipitation (CHIRPS, mm)",
            Feature::AreaHarvestedUsda => "Area harvested (USDA, 1000 ha)",
            Feature::AreaHarvestedFao => "Area harvested (FAO, 1000 ha)",
            Feature::WindNorthward => "Wind Northward (m/s)",
            Feature::SoilWaterL2 => "Soil Water L2 Fraction",
            Feature::SoilWaterL4 => "Soil Water L4 Fraction",
            Feature::ProductionUsda => "Production (USDA, 1000 ha)",
            Feature::ProductionFao => "Production (FAO, 1000 ha)",
        }
    }

    /// Value a field starts with.
    pub fn default_value(self) -> f64 {
        0.0
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_declaration_order_matches_all() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_model_order_is_a_permutation() {
        let unique: HashSet<Feature> = Feature::MODEL_ORDER.iter().copied().collect();
        assert_eq!(unique.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_model_order_matches_training_columns() {
        let keys: Vec<&str> = Feature::MODEL_ORDER.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "area_harvested_usda_1000ha",
                "production_usda_1000ha",
                "area_harvested_fao_1000ha",
                "production_fao_1000ha",
                "soil_temp_L1_C",
                "soil_temp_L2_C",
                "soil_temp_L3_C",
                "soil_temp_L4_C",
                "temp_C",
                "precipitation_era5_mm",
                "wind_northward_m_s",
                "soil_water_L2_fraction",
                "soil_water_L4_fraction",
                "precipitation_chirps_mm",
            ]
        );
    }

    #[test]
    fn test_form_columns_cover_every_feature_once() {
        let laid_out: Vec<Feature> = Feature::FORM_COLUMNS
            .iter()
            .flat_map(|col| col.iter().copied())
            .collect();
        assert_eq!(laid_out, Feature::ALL.to_vec());
        assert_eq!(
            Feature::FORM_COLUMNS.map(|c| c.len()),
            [4, 5, 5]
        );
    }

    #[test]
    fn test_model_index() {
        assert_eq!(Feature::AreaHarvestedUsda.model_index(), 0);
        assert_eq!(Feature::PrecipitationChirps.model_index(), 13);
        assert_eq!(Feature::SoilTempL1.model_index(), 4);
    }

    #[test]
    fn test_keys_are_unique_training_columns() {
        let keys: HashSet<&str> = Feature::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), FEATURE_COUNT);
        assert_eq!(Feature::SoilWaterL2.key(), "soil_water_L2_fraction");
        assert_eq!(Feature::Temperature.to_string(), "temp_C");
    }
}
