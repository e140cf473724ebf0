pub type SyllableOrdinal = u32;
