mod identifiers;
mod oneway_roundtrip;
mod salt_generation;
