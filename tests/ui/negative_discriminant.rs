use enum_flagset::flag_enum;

flag_enum! {
    pub enum Signal: i8 {
        Negative = -1,
        Zero = 0,
    }
}

fn main() {}
