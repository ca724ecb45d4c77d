use tinct::{Color, Rgb, Space};

pub fn main() -> Result<(), tinct::Error> {
    // chocolate
    let rgb = Rgb::new(210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0);

    // #d2691e
    println!("hex  = {}", rgb.to_hex());

    // h: 0.069444, s: 0.75, l: 0.470588
    println!("hsl  = {:?}", rgb.to_hsl());

    // h: 0.069444, w: 0.117647, b: 0.176471
    println!("hwb  = {:?}", rgb.to_hsl().to_hwb());

    // c: 0.0, m: 0.5, y: 0.857143, k: 0.176471
    println!("cmyk = {:?}", tinct::hex_to_cmyk("#d2691e")?);

    let color = Color::from(rgb);
    for space in Space::ALL {
        println!("{:?} -> {:?}", space, color.to_space(space)?);
    }

    Ok(())
}
