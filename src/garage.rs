use std::fmt;

use serde::Serialize;

use crate::error::InvalidNameError;

/// 駐車場所を表す構造体。
///
/// 名前のみを持ち、比較とハッシュは名前で行う。
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Garage {
    name: String,
}

impl Garage {
    /// 新しい`Garage`を返す。
    ///
    /// 名前が空白のみの場合はエラーを返す。
    ///
    /// # Examples
    ///
    /// ```
    /// let garage = garages::Garage::new("ISIS Castres").unwrap();
    /// assert_eq!(garage.name(), "ISIS Castres");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidNameError { kind: "garage name" });
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Garage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Garage(name={})", self.name)
    }
}
