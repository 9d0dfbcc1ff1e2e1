use glam::{Vec2, vec2};
use image::{Rgb, RgbImage};
use imageproc::{drawing, rect::Rect};
use lib_col::{Aabb, Circle};

const TRANSLATION_COUNT: usize = 10;
const OUT_IMG_WIDTH: u32 = 1024;
const OUT_IMG_HEIGHT: u32 = 1024;
const OUT_IMG_SCALE: f32 = 4.0;

/// An interface for a test case. All tests in this crate have one
/// thing in common. Their result must be the same if the scene gets
/// moved by some offset.
pub trait TestCase: Copy {
    /// The name of the test to use in the test report.
    fn name(&self) -> &'static str;

    /// Run the test and return success of failure.
    /// If you have a super helpful problem to report that
    /// the calling code can't see -- print it to stdout.
    fn check(&self) -> bool;

    /// Draw a visual aid to `canvas`.
    fn draw(&self, canvas: &mut RgbImage);
}

pub trait FuzzableTestCase: TestCase + Copy {
    /// Move the whole scene by `offset`.
    fn translate(self, offset: Vec2) -> Self;
}

#[allow(dead_code)]
pub fn run_tests_no_fuzz<T: TestCase>(tests: impl IntoIterator<Item = T>) {
    for case in tests.into_iter() {
        run_case(&case);
    }
}

#[allow(dead_code)]
pub fn run_tests<T: FuzzableTestCase>(tests: impl IntoIterator<Item = T>) {
    let extended = tests.into_iter().flat_map(translate_test);
    for case in extended {
        run_case(&case);
    }
}

fn run_case<T: TestCase>(case: &T) {
    println!("Running {:?}", case.name());
    if !case.check() {
        draw_test(case);
        panic!("Test {:?} failed. Visual aid dumped.", case.name());
    }
}

/// Generates a few copies of the same test, but moves each one
/// by a random offset.
fn translate_test<T: FuzzableTestCase>(case: T) -> impl IntoIterator<Item = T> {
    let cases = std::iter::repeat_n(case, TRANSLATION_COUNT).map(|case| {
        case.translate(random_offset())
    });
    std::iter::once(case).chain(cases)
}

fn random_offset() -> Vec2 {
    // Whole multiples keep the float math exact, so touching
    // shapes stay touching after the move.
    let x_increment = rand::random_range(-3..3);
    let y_increment = rand::random_range(-3..3);

    vec2(x_increment as f32 * 16.0, y_increment as f32 * 16.0)
}

fn draw_test<T: TestCase>(case: &T) {
    let mut img = RgbImage::new(OUT_IMG_WIDTH, OUT_IMG_HEIGHT);
    img.fill(0);
    case.draw(&mut img);
    img.save_with_format("test-out.png", image::ImageFormat::Png)
        .unwrap();
}

fn to_canvas(v: Vec2) -> Vec2 {
    v * OUT_IMG_SCALE + vec2(OUT_IMG_WIDTH as f32 / 4.0, OUT_IMG_HEIGHT as f32 / 4.0)
}

#[allow(dead_code)]
pub fn draw_aabb(canvas: &mut RgbImage, color: Rgb<u8>, aabb: Aabb) {
    let min = to_canvas(aabb.min);
    let size = aabb.size() * OUT_IMG_SCALE;
    if size.x < 1.0 || size.y < 1.0 {
        return;
    }

    let rect = Rect::at(min.x as i32, min.y as i32).of_size(size.x as u32, size.y as u32);
    drawing::draw_hollow_rect_mut(canvas, rect, color);
}

#[allow(dead_code)]
pub fn draw_circle(canvas: &mut RgbImage, color: Rgb<u8>, circle: Circle) {
    let center = to_canvas(circle.center);
    drawing::draw_hollow_circle_mut(
        canvas,
        (center.x as i32, center.y as i32),
        (circle.radius * OUT_IMG_SCALE) as i32,
        color,
    );
}
