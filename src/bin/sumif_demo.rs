use log::info;
use sparse_sumif::{MatrixSumIf, SparseMatrix, SparseMatrixBuilder};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut matrix = SparseMatrixBuilder::new(0.0).rows(5).cols(3).build();
    println!("{}", matrix);

    matrix.set_at(0, 2, 1.0);
    println!("{}", matrix);

    // Two columns are added to fit (4, 4)
    matrix.set_at(4, 4, 2.0);
    println!("{}", matrix);

    // On a 5x5 matrix index 14 is (4, 2)
    matrix.set_index(14, 3.0);
    println!("{}", matrix);

    // The read stores the default at (6, 6)
    println!("Element (6,6): {:?}", matrix.get_at(6, 6));
    println!("{}", matrix);

    info!(
        "Diagonal sum: {}",
        matrix.sum_if_by(|row, col| row == col)
    );

    let criteria = SparseMatrix::try_from_triplets(
        5,
        5,
        vec![0, 4, 4],
        vec![2, 2, 4],
        vec![1.0, -1.0, 1.0],
        0.0,
    )?;
    println!(
        "Sum where criteria > 0: {}",
        matrix.sum_if(&criteria, |v| v > 0.0)
    );
    Ok(())
}
