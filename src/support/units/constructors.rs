use uom::si::{
    amount_of_substance::micromole,
    area::square_meter,
    f64::{AmountOfSubstance, Area, Length, Mass, Time},
    length::meter,
    mass::gram,
    time::second,
};

use super::{ArealMass, LineicMass, SpecificAmount, SpecificAmountRate};

/// Creates a [`LineicMass`] from a value in g·m⁻¹.
#[must_use]
pub fn grams_per_meter(value: f64) -> LineicMass {
    Mass::new::<gram>(value) / Length::new::<meter>(1.0)
}

/// Creates an [`ArealMass`] from a value in g·m⁻².
#[must_use]
pub fn grams_per_square_meter(value: f64) -> ArealMass {
    Mass::new::<gram>(value) / Area::new::<square_meter>(1.0)
}

/// Creates a [`SpecificAmount`] from a value in µmol·g⁻¹.
#[must_use]
pub fn micromoles_per_gram(value: f64) -> SpecificAmount {
    AmountOfSubstance::new::<micromole>(value) / Mass::new::<gram>(1.0)
}

/// Creates a [`SpecificAmountRate`] from a value in µmol·g⁻¹·s⁻¹.
#[must_use]
pub fn micromoles_per_gram_second(value: f64) -> SpecificAmountRate {
    AmountOfSubstance::new::<micromole>(value) / (Mass::new::<gram>(1.0) * Time::new::<second>(1.0))
}

/// Returns the value of a [`SpecificAmount`] in µmol·g⁻¹.
#[must_use]
pub fn to_micromoles_per_gram(quantity: SpecificAmount) -> f64 {
    let amount: AmountOfSubstance = quantity * Mass::new::<gram>(1.0);
    amount.get::<micromole>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn lineic_mass_times_length_is_mass() {
        let mass: Mass = grams_per_meter(2.0) * Length::new::<meter>(0.25);
        assert_relative_eq!(mass.get::<gram>(), 0.5);
    }

    #[test]
    fn areal_mass_times_area_is_mass() {
        let mass: Mass = grams_per_square_meter(20.0) * Area::new::<square_meter>(0.01);
        assert_relative_eq!(mass.get::<gram>(), 0.2);
    }

    #[test]
    fn specific_amount_roundtrips_through_micromoles() {
        let concentration = micromoles_per_gram(125.0);
        assert_relative_eq!(to_micromoles_per_gram(concentration), 125.0, epsilon = 1e-9);

        let pool: AmountOfSubstance = concentration * Mass::new::<gram>(2.0);
        assert_relative_eq!(pool.get::<micromole>(), 250.0, epsilon = 1e-9);
    }

    #[test]
    fn specific_rate_integrates_to_amount() {
        let rate = micromoles_per_gram_second(0.01);
        let amount: AmountOfSubstance =
            rate * Mass::new::<gram>(3.0) * Time::new::<second>(100.0);
        assert_relative_eq!(amount.get::<micromole>(), 3.0, epsilon = 1e-9);
    }
}
