//! Newtype ids for store-assigned entities.
//!
//! Services and bookings are identified by the document store's 12-byte
//! object ids, which travel over the API as 24-character hex strings. The
//! `define_object_id!` macro creates a distinct wrapper per entity so a
//! booking id cannot be passed where a service id is expected.

/// Errors that can occur when parsing an object id.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    /// The input is not exactly 24 characters long.
    #[error("object id must be exactly 24 hex characters (got {len})")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[error("object id must be hex-encoded (invalid character {ch:?})")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
}

/// Decode a 24-character hex string into 12 raw bytes.
#[doc(hidden)]
pub fn decode_hex(s: &str) -> Result<[u8; 12], ObjectIdError> {
    if s.len() != 24 {
        return Err(ObjectIdError::InvalidLength { len: s.len() });
    }

    let nibble = |ch: char| {
        ch.to_digit(16)
            .map(|d| d as u8)
            .ok_or(ObjectIdError::InvalidCharacter { ch })
    };

    let mut bytes = [0_u8; 12];
    let mut chars = s.chars();
    for byte in &mut bytes {
        // Length was checked above, so both nibbles are present.
        let hi = chars.next().map_or(Ok(0), nibble)?;
        let lo = chars.next().map_or(Ok(0), nibble)?;
        *byte = (hi << 4) | lo;
    }
    Ok(bytes)
}

/// Encode 12 raw bytes as a lowercase hex string.
#[doc(hidden)]
#[must_use]
pub fn encode_hex(bytes: &[u8; 12]) -> String {
    use core::fmt::Write as _;

    let mut out = String::with_capacity(24);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Macro to define a type-safe object id wrapper.
///
/// Creates a newtype wrapper around the store's 12-byte object id with:
/// - `parse()` from a 24-character hex string, `to_hex()` back out
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`/`Deserialize` as the hex string
/// - `Display` and `FromStr`
/// - Conversions to/from `bson::oid::ObjectId` (with the `bson` feature)
///
/// # Example
///
/// ```rust
/// # use pet_care_core::define_object_id;
/// define_object_id!(ServiceId);
/// define_object_id!(BookingId);
///
/// let service_id = ServiceId::parse("65b2a1f0c4d5e6a7b8091a2b").unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: BookingId = service_id;
/// ```
#[macro_export]
macro_rules! define_object_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; 12]);

        impl $name {
            /// Parse an id from its 24-character hex representation.
            ///
            /// # Errors
            ///
            /// Returns an error if the input has the wrong length or
            /// contains a non-hex character.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::ObjectIdError> {
                $crate::types::id::decode_hex(s).map(Self)
            }

            /// The id as a lowercase hex string.
            #[must_use]
            pub fn to_hex(&self) -> ::std::string::String {
                $crate::types::id::encode_hex(&self.0)
            }

            /// The raw 12 id bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; 12] {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ObjectIdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <::std::string::String as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::parse(&s).map_err($crate::types::id::de_error::<D::Error>)
            }
        }

        #[cfg(feature = "bson")]
        impl From<::bson::oid::ObjectId> for $name {
            fn from(oid: ::bson::oid::ObjectId) -> Self {
                Self(oid.bytes())
            }
        }

        #[cfg(feature = "bson")]
        impl From<$name> for ::bson::oid::ObjectId {
            fn from(id: $name) -> Self {
                Self::from_bytes(id.0)
            }
        }

        #[cfg(feature = "bson")]
        impl From<&$name> for ::bson::oid::ObjectId {
            fn from(id: &$name) -> Self {
                Self::from_bytes(id.0)
            }
        }
    };
}

/// Bridge an [`ObjectIdError`] into a serde deserialization error.
#[doc(hidden)]
pub fn de_error<E: serde::de::Error>(err: ObjectIdError) -> E {
    E::custom(err)
}

// Define standard entity ids
define_object_id!(ServiceId);
define_object_id!(BookingId);
