use crate::constants::{DEPENDENCY, MODULE};
use bitflags::bitflags;
use serde::de::{Error as _, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Roles an implementation type declares it can play inside a tenant container.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u8 {
        /// Composition unit that configures how other services are wired.
        const MODULE = 1 << 0;
        /// Injectable service, configurable through component parameters.
        const DEPENDENCY = 1 << 1;

        const ALL = Self::MODULE.bits() | Self::DEPENDENCY.bits();
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

impl Capabilities {
    /// Parses a single capability tag. Unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            MODULE => Some(Self::MODULE),
            DEPENDENCY => Some(Self::DEPENDENCY),
            "all" | "*" => Some(Self::ALL),
            _ => None,
        }
    }

    fn tags(self) -> impl Iterator<Item = &'static str> {
        [(Self::MODULE, MODULE), (Self::DEPENDENCY, DEPENDENCY)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, tag)| tag)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.tags().collect();
        if tags.is_empty() { f.write_str("none") } else { f.write_str(&tags.join("+")) }
    }
}

/// Serialized as a list of tags (`["module", "dependency"]`) to keep manifests readable.
impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let tags: Vec<&str> = self.tags().collect();
        let mut seq = serializer.serialize_seq(Some(tags.len()))?;
        for tag in tags {
            seq.serialize_element(tag)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Capabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagsVisitor;

        impl<'de> Visitor<'de> for TagsVisitor {
            type Value = Capabilities;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of capability tags")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut caps = Capabilities::empty();
                while let Some(tag) = seq.next_element::<String>()? {
                    caps |= Capabilities::from_tag(&tag)
                        .ok_or_else(|| A::Error::custom(format!("unknown capability `{tag}`")))?;
                }
                Ok(caps)
            }
        }

        deserializer.deserialize_seq(TagsVisitor)
    }
}
