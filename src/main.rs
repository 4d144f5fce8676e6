use log::info;
use shape_compat::{
    options::Options,
    record::{length_l1_with, Record},
};

fn main() -> shape_compat::Result<()> {
    env_logger::init();

    let vec3d = Record::new()
        .with_number("x", 3.0)
        .with_number("y", 4.0)
        .with_number("z", 1.0)
        .with_text("address", "hello");

    let options = Options::default();
    info!("Non-numeric fields: {:?}", options.non_numeric);
    println!("{}", length_l1_with(&vec3d, &options)?);
    Ok(())
}
