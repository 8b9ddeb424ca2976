/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Core FIX value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side enumeration (tag 54).
///
/// The extractor stores the side as the decoded integer; this enum gives
/// the numeric codes their FIX meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy = 1,
    /// Sell order.
    Sell = 2,
    /// Buy minus.
    BuyMinus = 3,
    /// Sell plus.
    SellPlus = 4,
    /// Sell short.
    SellShort = 5,
    /// Sell short exempt.
    SellShortExempt = 6,
    /// Undisclosed.
    Undisclosed = 7,
    /// Cross (both sides).
    Cross = 8,
    /// Cross short.
    CrossShort = 9,
}

impl Side {
    /// Creates a Side from its numeric code.
    ///
    /// # Returns
    /// `Some(Side)` for codes 1 through 9, `None` otherwise.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Buy),
            2 => Some(Self::Sell),
            3 => Some(Self::BuyMinus),
            4 => Some(Self::SellPlus),
            5 => Some(Self::SellShort),
            6 => Some(Self::SellShortExempt),
            7 => Some(Self::Undisclosed),
            8 => Some(Self::Cross),
            9 => Some(Self::CrossShort),
            _ => None,
        }
    }

    /// Returns the numeric code of this side.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns true if this is a buy-side order.
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy | Self::BuyMinus)
    }

    /// Returns true if this is a sell-side order.
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(
            self,
            Self::Sell | Self::SellPlus | Self::SellShort | Self::SellShortExempt
        )
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::BuyMinus => "BuyMinus",
            Self::SellPlus => "SellPlus",
            Self::SellShort => "SellShort",
            Self::SellShortExempt => "SellShortExempt",
            Self::Undisclosed => "Undisclosed",
            Self::Cross => "Cross",
            Self::CrossShort => "CrossShort",
        };
        f.write_str(label)
    }
}

impl TryFrom<i32> for Side {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_code(value).ok_or(value)
    }
}
