/// One sample of the profit-vs-discount sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// The integer discount this point was evaluated at, in percent
    pub discount_pct: u8,

    /// Expected profit at that discount, with the subsidy held fixed
    pub profit: f64,
}

/// The profit-vs-discount curve: one point per integer discount, ascending.
///
/// The zero reference line drawn through this curve is the renderer's
/// concern; the curve itself is just the ordered samples.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProfitCurve(pub Vec<CurvePoint>);

impl std::ops::Deref for ProfitCurve {
    type Target = [CurvePoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ProfitCurve {
    type Item = CurvePoint;
    type IntoIter = std::vec::IntoIter<CurvePoint>;

    /// Forward the into_iter() implementation from the newtype
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<CurvePoint> for ProfitCurve {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}
