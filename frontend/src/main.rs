fn main() {
    wfh_frontend::start();
}
