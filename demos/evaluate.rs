use dhframe::prelude::*;

fn main() {
    let elbow = Transform::new("theta", 0.1, std::f64::consts::FRAC_PI_2, 0.35);
    println!("symbolic transform:\n{}", elbow.matrix());
    println!("inverse:\n{}", elbow.inverse());

    match elbow.apply(&[0.5]) {
        Ok(matrix) => println!("theta = 0.5 =>{matrix}"),
        Err(err) => eprintln!("evaluation failed: {err}"),
    }

    let slide = trans_z("d");
    if let Err(err) = slide.apply(&[]) {
        eprintln!("expected failure: {err}");
    }
}
