mod demo;

fn main() {
    demo::run();
}
