// main.rs
//
// Minimal example of each entry point of parabolic-edt, printing the distance
// maps of a few small masks. With the `image-io` feature a PNG of a larger
// distance map is written to `out/`.

use ndarray::{Array1, Array2, Array3};
use parabolic_edt::{
    DistanceTransform, distance_parabola, distance_transform, squared_distance_transform,
};

fn print_map<T: std::fmt::Display>(title: &str, map: &Array2<T>) {
    println!("{title}");
    for row in map.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>6.2}")).collect();
        println!("  {}", cells.join(" "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) a single line of seed distances
    let line = Array1::from(vec![0.0, 1e9, 1e9, 1e9, 1e9]);
    let mut squared = Array1::<f64>::zeros(5);
    distance_parabola(line.view(), squared.view_mut(), 1.0, false)?;
    println!("1D squared distances: {squared}\n");

    // 2) squared distances of the background to a single object pixel
    let mut mask = Array2::<u8>::zeros((5, 5));
    mask[[2, 2]] = 1;
    let mut dist = Array2::<u32>::zeros((5, 5));
    squared_distance_transform(&mask, &mut dist, true, None)?;
    print_map("squared distance to the centre pixel", &dist);

    // 3) true Euclidean distances inside an object, anisotropic pitch
    let object = Array2::from_shape_fn((6, 8), |(r, c)| (1..5).contains(&r) && (1..7).contains(&c));
    let mut inner = Array2::<f64>::zeros((6, 8));
    distance_transform(&object, &mut inner, false, Some(&[2.0, 1.0]))?;
    print_map("distance to the background, rows twice as far apart", &inner);

    // 4) 8-bit output: far values saturate at 255
    let mut big = Array2::<u8>::zeros((32, 32));
    big[[0, 0]] = 1;
    let mut saturated = Array2::<u8>::zeros((32, 32));
    squared_distance_transform(&big, &mut saturated, true, None)?;
    println!(
        "u8 squared distance at (31, 31): {} (true value {})\n",
        saturated[[31, 31]],
        31 * 31 * 2
    );

    // 5) the owned front end on a 3D volume
    let mut volume = Array3::<bool>::from_elem((4, 4, 4), false);
    volume[[0, 0, 0]] = true;
    let field = DistanceTransform::new().background(true).euclidean(&volume)?;
    println!("3D distance at (3, 3, 3): {:.4}", field[[3, 3, 3]]);

    #[cfg(feature = "image-io")]
    {
        use image::{GrayImage, Luma};
        use parabolic_edt::image::distance_image;

        let _ = std::fs::create_dir_all("out");
        let img = GrayImage::from_fn(128, 128, |x, y| {
            let (dx, dy) = (x as i32 - 64, y as i32 - 64);
            Luma([if dx * dx + dy * dy < 20 * 20 { 255 } else { 0 }])
        });
        distance_image(&img, 128, true)?.save("out/disc_distance.png")?;
        println!("wrote out/disc_distance.png");
    }

    Ok(())
}
