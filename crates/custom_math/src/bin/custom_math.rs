use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use custom_math::{Matrix4x4, Quaternion, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "Compose and inspect 3D transforms", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Build a translate-rotate-scale matrix
        Trs {
            /// Translation as `x,y,z`
            #[arg(short, long, value_parser = parse_vector3, allow_hyphen_values = true, default_value = "0,0,0")]
            position: Vector3,

            /// Rotation as Euler angles `x,y,z` in degrees
            #[arg(short, long, value_parser = parse_vector3, allow_hyphen_values = true, default_value = "0,0,0")]
            rotation: Vector3,

            /// Scale factors as `x,y,z`
            #[arg(short, long, value_parser = parse_vector3, allow_hyphen_values = true, default_value = "1,1,1")]
            scale: Vector3,

            /// Point `x,y,z` to transform with the resulting matrix
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
            point: Option<Vector3>,
        },
        /// Convert Euler angles to a quaternion and back
        Euler {
            /// Euler angles `x,y,z` in degrees
            #[arg(short, long, value_parser = parse_vector3, allow_hyphen_values = true)]
            angles: Vector3,
        },
        /// Spherically interpolate between two rotations
        Slerp {
            /// Start rotation as Euler angles `x,y,z` in degrees
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
            from: Vector3,

            /// End rotation as Euler angles `x,y,z` in degrees
            #[arg(long, value_parser = parse_vector3, allow_hyphen_values = true)]
            to: Vector3,

            /// Interpolation parameter, clamped to [0, 1]
            #[arg(short, long, default_value_t = 0.5)]
            t: f32,
        },
    }

    fn parse_vector3(value: &str) -> Result<Vector3, String> {
        let components = value
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f32>()
                    .map_err(|err| format!("invalid component `{component}`: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components[..] {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => Err(format!(
                "expected 3 comma-separated components, got {}",
                components.len()
            )),
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running {:?}", cli.command);

        match cli.command {
            Command::Trs {
                position,
                rotation,
                scale,
                point,
            } => {
                let rotation = Quaternion::from_euler_angles(&rotation);
                log::debug!("Rotation quaternion: {rotation}");

                let matrix = Matrix4x4::trs(&position, &rotation, &scale);
                print!("{matrix}");

                if let Some(point) = point {
                    println!("point: {}", matrix.transform_point(&point));
                }
            }
            Command::Euler { angles } => {
                let rotation = Quaternion::from_euler_angles(&angles);
                println!("quaternion: {rotation}");
                println!("euler angles: {}", rotation.euler_angles());
                let (angle, axis) = rotation.to_angle_axis();
                println!("angle: {angle} about axis {axis}");
            }
            Command::Slerp { from, to, t } => {
                let from = Quaternion::from_euler_angles(&from);
                let to = Quaternion::from_euler_angles(&to);
                log::debug!("Angle between rotations: {}", from.angle(&to));

                let rotation = from.slerp(&to, t);
                println!("quaternion: {rotation}");
                println!("euler angles: {}", rotation.euler_angles());
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
