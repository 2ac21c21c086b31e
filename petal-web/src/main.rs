use petal_web::App;

fn main() {
    dioxus::launch(App);
}
