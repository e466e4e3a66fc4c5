fn main() {
    clinic_client::run();
}
