use utmatrix::Matrix;

fn main() -> Result<(), utmatrix::UtError> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("UTMATRIX_LOG", "info"))
        .init();

    let n = 5;
    let mut a = Matrix::<i32>::new(n)?;
    let mut b = Matrix::<i32>::new(n)?;
    for i in 0..n {
        for j in i..n {
            a[(i, j)] = (i * 10 + j) as i32;
            b[(i, j)] = ((i * 10 + j) * 100) as i32;
        }
    }
    let c = a.try_add(&b)?;
    log::info!("summed two {n}x{n} upper-triangular matrices");

    println!("Matrix a =\n{a}");
    println!("Matrix b =\n{b}");
    println!("Matrix c = a + b\n{c}");
    Ok(())
}
