fn main() {
    dioxus::launch(portal::App);
}
