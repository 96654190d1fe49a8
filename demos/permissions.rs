use core::ops::ControlFlow;

use enum_flagset::{FlagSet, flag_enum};

flag_enum! {
    #[derive(Debug)]
    enum Permission: u8 {
        Read,
        Write,
        Execute,
        Share = 5,
        Admin = 7,
    }
}

type Permissions = FlagSet<Permission, u8>;

fn describe(name: &str, granted: Permissions) {
    let mut line = [""; 8];
    let mut count = 0;
    granted.for_each(|permission| {
        line[count] = match permission {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Execute => "execute",
            Permission::Share => "share",
            Permission::Admin => "admin",
        };
        count += 1;
    });
    println!("{name:>8}: {:?} ({:#010b})", &line[..count], granted.bits());
}

fn main() {
    let viewer = Permissions::from_flags(&[Permission::Read]);
    let editor = viewer + Permission::Write + Permission::Share;
    let mut admin = Permissions::all_through(Permission::Admin);
    admin.unset(&[Permission::Execute]);

    describe("viewer", viewer);
    describe("editor", editor);
    describe("admin", admin);

    for (name, granted) in [("viewer", viewer), ("editor", editor), ("admin", admin)] {
        let can_change = granted.are_any_set(&[Permission::Write, Permission::Admin]);
        let first_privileged = granted.try_for_each(|permission| match permission {
            Permission::Share | Permission::Admin => ControlFlow::Break(permission),
            _ => ControlFlow::Continue(()),
        });
        println!("{name:>8}: can change = {can_change}, first privileged = {first_privileged:?}");
    }
}
