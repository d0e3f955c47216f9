#[bitwise_enum::bitmask]
enum Alignment {
    None = 0,
    Top = 1,
    Bottom = 2,
    Left = 4,
    Right = 8,
}

fn main() {
    let mut align = Alignment::None;
    align |= Alignment::Top;
    align |= Alignment::Left;

    for (flag, name) in [
        (Alignment::Top, "top"),
        (Alignment::Bottom, "bottom"),
        (Alignment::Left, "left"),
        (Alignment::Right, "right"),
    ] {
        if bool::from(align & flag) {
            println!("Aligning {name} ...");
        }
    }
    println!("{:08b}", u8::from(align));
}
