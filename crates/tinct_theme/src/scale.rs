//! Ordered, closed-key token scales

use serde::{Serialize, Serializer};
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexMap;

/// A token key enum with a fixed, ordered set of members
pub trait Token: Copy + Debug + Eq + Hash + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// String key used for lookups and serialization
    fn key(self) -> &'static str;

    /// Inverse of [`Token::key`]
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.key() == key)
    }
}

/// Declares a token enum and its [`Token`] impl from `Variant => "key"` pairs.
macro_rules! define_tokens {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::scale::Token for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }
    };
}

pub(crate) use define_tokens;

/// Immutable mapping from every member of `K` to a value
///
/// Entries keep the declaration order of `K`. Lookups work either with the
/// typed token ([`Scale::token`]) or with its string key ([`Scale::get`]).
#[derive(Clone)]
pub struct Scale<K: Token, V> {
    entries: IndexMap<&'static str, V>,
    _keys: PhantomData<K>,
}

impl<K: Token, V> Scale<K, V> {
    /// Build a scale by evaluating `value` once per token
    pub(crate) fn from_fn(mut value: impl FnMut(K) -> V) -> Self {
        let entries = K::ALL
            .iter()
            .map(|&token| (token.key(), value(token)))
            .collect();
        Self {
            entries,
            _keys: PhantomData,
        }
    }

    /// Value for a typed token; total because every member is present
    pub fn token(&self, token: K) -> &V {
        &self.entries[token.key()]
    }

    /// Value for a string key, `None` if the key is not part of this scale
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Token, V: PartialEq> PartialEq for Scale<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Token, V: Debug> Debug for Scale<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Token, V: Serialize> Serialize for Scale<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}
