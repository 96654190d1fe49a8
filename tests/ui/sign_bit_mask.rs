use enum_flagset::flag_mask;

fn main() {
    let _mask: i8 = flag_mask!(i8; 7);
}
