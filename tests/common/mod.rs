/// Size strings paired with the byte count they must parse to
pub const VALID_INPUTS: &[(&str, i64)] = &[
    ("0", 0),
    ("1023", 1023),
    ("1024B", 1024),
    ("1KB", 1024),
    ("1K", 1024),
    ("1kb", 1024),
    ("1Kb", 1024),
    ("1 KB", 1024),
    ("1.5KB", 1536),
    ("0.5GB", 536_870_912),
    ("10 mb", 10_485_760),
    ("2T", 2_199_023_255_552),
    ("1pb", 1_125_899_906_842_624),
];
