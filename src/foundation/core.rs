use crate::foundation::error::{GuideError, GuideResult};

/// Point on the simulated UI clock, in milliseconds since the clock's origin.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Clock origin.
    pub const ZERO: Self = Self(0);

    /// Add `ms` milliseconds using saturating arithmetic.
    pub fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier`, zero when `earlier` is in the future.
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serializes as a hex string; deserializes from a hex string or an `{r, g, b, a}` object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> GuideResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> GuideResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| GuideError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(GuideError::validation("hex color must be ASCII"));
        }

        match s.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in s.chars().enumerate() {
                    let nib = hex_byte(&c.to_string())?;
                    out[i] = nib * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(GuideError::validation(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Lowercase `#rrggbb` form, with `aa` appended only when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self { r, g, b, a }),
        }
    }
}

/// Host platform; selects platform-dependent layout constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// iOS (taller status bar area).
    #[default]
    Ios,
    /// Android.
    Android,
}

impl Platform {
    /// Collapsed height of the exhibit header on this platform.
    pub fn header_min_height(self) -> f64 {
        match self {
            Self::Ios => 90.0,
            Self::Android => 70.0,
        }
    }
}

/// Expanded height of the exhibit header.
pub const HEADER_MAX_HEIGHT: f64 = 300.0;

/// Whether the view owning a controller is still on screen.
///
/// Every asynchronously arriving callback checks this before touching state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created but not yet mounted, or already torn down.
    #[default]
    Unmounted,
    /// On screen; callbacks may apply.
    Mounted,
}

impl Lifecycle {
    /// Return `true` while mounted.
    pub fn is_mounted(self) -> bool {
        self == Self::Mounted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
