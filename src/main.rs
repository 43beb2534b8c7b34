fn main() {
    cannonade::game::run();
}
