fn main() {
    let _mask: u8 = enum_flagset::bit_mask_for(true);
}
