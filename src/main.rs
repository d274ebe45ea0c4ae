fn main() {
    wave_shooter::game::run();
}
