use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, Z0},
};

/// Mass per unit length, kg/m in SI.
pub type LineicMass = Quantity<ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass per unit area, kg/m² in SI.
pub type ArealMass = Quantity<ISQ<N2, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Amount of substance per unit mass, mol/kg in SI.
pub type SpecificAmount = Quantity<ISQ<Z0, N1, Z0, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// Amount of substance per unit mass and time, mol/(kg·s) in SI.
pub type SpecificAmountRate = Quantity<ISQ<Z0, N1, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;
