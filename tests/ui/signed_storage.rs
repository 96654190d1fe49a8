use enum_flagset::FlagSet;

fn store(_flags: FlagSet<u8, i32>) {}

fn main() {}
