fn main() {
    talentrack_frontend::start();
}
